use sattrack::EngineConfig;
use std::{collections::HashSet, fs, path::Path};

const CONFIG_FILES: &[&str] = &["catalog_overview.toml", "default.toml"];

#[test]
fn config_file_list_matches_expected() {
    let cfg_files: HashSet<String> = fs::read_dir("../configs")
        .unwrap()
        .map(|d| d.unwrap().file_name().into_string().unwrap())
        .collect();
    let expected: HashSet<String> = CONFIG_FILES.iter().map(|f| f.to_string()).collect();
    assert_eq!(cfg_files, expected, "The configs directory is missing an expected config file or contains a new config file that should be tested");
}

#[test]
fn config_files_parse() {
    let dir = Path::new("../configs");
    for cfg_file in CONFIG_FILES {
        let p = dir.join(cfg_file);
        if let Err(e) = EngineConfig::load(&p) {
            panic!("{}: {e}", p.display());
        }
    }
}

#[test]
fn default_file_matches_builtin_defaults() {
    let cfg = EngineConfig::load("../configs/default.toml").unwrap();
    assert_eq!(cfg, EngineConfig::default());
}
