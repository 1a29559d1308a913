use std::fs;
use std::path::Path;

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// группа бенчмарков: нормализация каждого текста из папки
#[macro_export]
macro_rules! group {
    ($dir: expr, $fn: ident, $test: ident, $group: expr, $name: expr, $normalizer_type: ty, $normalizer: expr) => {
        #[inline(never)]
        fn $test(normalizer: &$normalizer_type, source: &str) -> String
        {
            normalizer.normalize(source)
        }

        fn $fn(c: &mut criterion::Criterion)
        {
            let mut group = c.benchmark_group($group);
            let normalizer = $normalizer;

            group.warm_up_time(core::time::Duration::from_secs($crate::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs($crate::MEASUREMENT_TIME));

            for data in $crate::read_dir($dir) {
                let text_name = data.0.as_str();
                let text = data.1.as_str();

                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &text_name),
                    &(&normalizer, text),
                    |b, data| b.iter(|| $test(data.0, criterion::black_box(data.1))),
                );
            }

            group.finish();
        }
    };
}

/// прочитать папку с тестовыми текстами
pub fn read_dir(dir: &str) -> Vec<(String, String)>
{
    let mut data: Vec<(String, String)> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();

            (get_name(&path), read(&path, 1))
        })
        .collect();

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}

/// прочитать файл n раз
fn read(source: &Path, times: usize) -> String
{
    let buffer = fs::read_to_string(source).unwrap();

    buffer.repeat(times + 1)
}

/// название файла без формата
fn get_name(path: &Path) -> String
{
    path.file_stem().unwrap().to_string_lossy().into_owned()
}
