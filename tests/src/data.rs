use std::fs;
use std::path::Path;

/// папка с текстами на разных языках
pub const TEXTS: &str = "./../test_data/texts";
/// те же тексты в NFD
pub const TEXTS_DECOMPOSED: &str = "./../test_data/texts_decomposed";

/// данные на разных языках для тестов: название (без формата) и текст
pub fn files(dir: &str) -> Vec<(String, String)>
{
    let mut data: Vec<(String, String)> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();

            (get_name(&path), fs::read_to_string(&path).unwrap())
        })
        .collect();

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}

/// название файла без формата
fn get_name(path: &Path) -> String
{
    path.file_stem().unwrap().to_string_lossy().into_owned()
}

/// логирование в тестах: уровень задается переменной RUST_LOG
pub fn init_tracing()
{
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
