use crate::config::PipelineConfig;
use std::fs;
use tempfile::TempDir;

/// A temp workspace with `input/data.json` holding `feed` and an empty
/// `output/` location. The dir is removed when the guard drops.
pub fn workspace_with_feed(feed: &str) -> (TempDir, PipelineConfig) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let input_dir = dir.path().join("input");
    fs::create_dir_all(&input_dir).expect("Failed to create input dir");

    let input_path = input_dir.join("data.json");
    fs::write(&input_path, feed).expect("Failed to write feed");

    let config = PipelineConfig::new(input_path, dir.path().join("output"));
    (dir, config)
}

pub const SAMPLE_FEED: &str = r#"[
  {"id": 865, "bairro": "CENTRO", "endereco": "AVENIDA AFONSO PENA, 1200",
   "descricaoImovel": "Terreno de esquina. TAMANHO 12x30 m²", "valor": 480000},
  {"id": 866, "bairro": "CENTRO", "endereco": "RUA 14 DE JULHO, 50",
   "descricaoImovel": "Ótimo lote plano, sem documentação", "valor": 210000},
  {"id": 867, "bairro": "TIRADENTES", "endereco": "RUA DAS GARÇAS, 90",
   "descricaoImovel": "Área do Terreno: 360 m²", "valor": 150000},
  {"id": 868, "bairro": "TIRADENTES", "endereco": "Rua Marabá, 12",
   "descricaoImovel": "Lote MEDINDO ١٢٠ m", "valor": 99000},
  {"id": 869, "bairro": "TIRADENTES", "endereco": "Rua Japão, 300",
   "descricaoImovel": null, "valor": 120000},
  {"id": 870, "bairro": "CENTRO", "endereco": "Avenida Mato Grosso, 8",
   "descricaoImovel": "o lote tem 300 m2 de área, ESQUINA", "valor": 390000}
]"#;
