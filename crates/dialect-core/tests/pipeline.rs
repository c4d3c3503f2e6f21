use std::fs;
use std::path::Path;

use dialect_core::{
    generate, prepare, resolve, run, DialectError, PipelineConfig, DEFAULT_COLOR, UNKNOWN_PROVINCE,
};
use serde_json::Value;

const HEADER: &str = "location,latitude,longitude,collector,audio,content\n";

fn write_table(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("{HEADER}{body}")).expect("failed writing table");
    path
}

fn read_json(path: &Path) -> Vec<Value> {
    let text = fs::read_to_string(path).expect("output missing");
    serde_json::from_str(&text).expect("output is not a JSON array")
}

#[test]
fn end_to_end_bad_latitude_and_audio_prefix() {
    let temp = tempfile::tempdir().expect("failed creating tempdir");
    let input = write_table(temp.path(), "data.csv", "北京某胡同,bad,39.9,张三,rec/foo.wav,你好\n");
    let output = temp.path().join("out.json");

    let config = PipelineConfig::new(&input)
        .with_output(&output)
        .with_audio_prefix("https://cdn.example/");
    let summary = generate(&config).expect("run failed");
    assert_eq!(summary.records, 1);
    assert_eq!(summary.provinces, 1);
    assert_eq!(summary.warnings, 1);

    let records = read_json(&output);
    let r = &records[0];
    assert_eq!(r["id"], "dialect_1");
    assert_eq!(r["province"], "北京市");
    assert_eq!(r["latitude"], 0.0);
    assert_eq!(r["longitude"], 39.9);
    assert_eq!(r["audio"]["url"], "https://cdn.example/rec/foo.wav");
    assert_eq!(r["audio"]["name"], "foo");
    assert_eq!(r["collector"], "张三");

    // non-ASCII stays literal
    let raw = fs::read_to_string(&output).unwrap();
    assert!(raw.contains("北京某胡同"));
    assert!(!raw.contains("\\u"));
}

#[test]
fn same_province_shares_color() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_table(temp.path(), "data.csv", "广州,23.1,113.3,,,\n深圳,22.5,114.1,,,\n");
    let output = temp.path().join("out.json");

    let summary = generate(&PipelineConfig::new(&input).with_output(&output)).unwrap();
    assert_eq!(summary.provinces, 1);

    let records = read_json(&output);
    assert_eq!(records[0]["province"], "广东省");
    assert_eq!(records[1]["province"], "广东省");
    assert_eq!(records[0]["color"], records[1]["color"]);
}

#[test]
fn every_record_is_consistent_with_resolver_and_palette() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_table(
        temp.path(),
        "data.csv",
        "江苏南京,32.0,118.8,a,x/1.mp3,c\n\
         沪上风光,31.2,121.5,b,,\n\
         绵阳市,31.4,104.7,,,\n\
         ,0,0,,,\n\
         某个小村庄,1,2,,,\n\
         新疆喀什,39.5,76.0,,,\n",
    );

    let config = PipelineConfig::new(&input).with_output(temp.path().join("o.json"));
    let built = prepare(&config).unwrap();
    let locations = [
        Some("江苏南京"),
        Some("沪上风光"),
        Some("绵阳市"),
        None,
        Some("某个小村庄"),
        Some("新疆喀什"),
    ];

    for (record, location) in built.records.iter().zip(locations) {
        let expected = resolve(location);
        assert_eq!(record.province, expected);
        if expected == UNKNOWN_PROVINCE {
            assert_eq!(record.color, DEFAULT_COLOR);
        } else {
            assert_eq!(record.color, built.colors.get(expected));
            assert_ne!(record.color, DEFAULT_COLOR);
        }
    }
    assert_eq!(built.province_count, 5);
    assert_eq!(built.unknown_rows(), 2);
    assert_eq!(built.records[3].location, "未知地点_4");
}

#[test]
fn chinese_headers_are_accepted() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("data.csv");
    fs::write(&input, "地点名,纬度,经度,采集人,音频,内容\n成都,30.6,104.1,,a.wav,\n").unwrap();
    let output = temp.path().join("out.json");

    assert!(run(&PipelineConfig::new(&input).with_output(&output)));
    let records = read_json(&output);
    assert_eq!(records[0]["province"], "四川省");
    assert_eq!(records[0]["content"], "无内容描述");
}

#[test]
fn missing_input_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();
    let output = temp.path().join("out.json");
    let config = PipelineConfig::new(temp.path().join("nope.csv")).with_output(&output);

    assert!(matches!(generate(&config), Err(DialectError::NotFound(_))));
    assert!(!run(&config));
    assert!(!output.exists());
}

#[test]
fn structural_error_leaves_previous_output_untouched() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("data.csv");
    fs::write(&input, "location,latitude\n北京,39.9\n").unwrap();
    let output = temp.path().join("out.json");
    fs::write(&output, "previous").unwrap();

    let config = PipelineConfig::new(&input).with_output(&output);
    assert!(matches!(
        generate(&config),
        Err(DialectError::MissingColumn { .. })
    ));
    assert!(!run(&config));
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn empty_table_writes_empty_array() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_table(temp.path(), "data.csv", "");
    let output = temp.path().join("out.json");

    let summary = generate(&PipelineConfig::new(&input).with_output(&output)).unwrap();
    assert_eq!(summary.records, 0);
    assert_eq!(summary.provinces, 0);
    assert!(read_json(&output).is_empty());
}

#[test]
fn tab_separated_input() {
    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("data.tsv");
    fs::write(
        &input,
        "location\tlatitude\tlongitude\tcollector\taudio\tcontent\n杭州\t30.3\t120.2\t\t\t\n",
    )
    .unwrap();
    let output = temp.path().join("out.json");

    let config = PipelineConfig::new(&input)
        .with_output(&output)
        .with_delimiter(b'\t');
    generate(&config).unwrap();
    assert_eq!(read_json(&output)[0]["province"], "浙江省");
}

#[cfg(feature = "compact")]
#[test]
fn gzip_input() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let temp = tempfile::tempdir().unwrap();
    let input = temp.path().join("data.csv.gz");
    let mut encoder = GzEncoder::new(fs::File::create(&input).unwrap(), Compression::default());
    encoder
        .write_all(format!("{HEADER}深圳南山,22.5,113.9,,,\n").as_bytes())
        .unwrap();
    encoder.finish().unwrap();
    let output = temp.path().join("out.json");

    generate(&PipelineConfig::new(&input).with_output(&output)).unwrap();
    assert_eq!(read_json(&output)[0]["province"], "广东省");
}

#[cfg(feature = "spreadsheet")]
#[test]
fn xlsx_workbook_with_chinese_headers() {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/dialects.xlsx");
    let temp = tempfile::tempdir().unwrap();
    let output = temp.path().join("out.json");

    let config = PipelineConfig::new(&fixture)
        .with_output(&output)
        .with_audio_prefix("https://cdn.example/");
    let summary = generate(&config).expect("workbook run failed");
    assert_eq!(summary.records, 3);
    assert_eq!(summary.provinces, 3);
    assert_eq!(summary.warnings, 1);

    let records = read_json(&output);
    assert_eq!(records[0]["province"], "江苏省");
    assert_eq!(records[0]["latitude"], 32.06);
    assert_eq!(records[0]["longitude"], 118.79);
    assert_eq!(records[0]["audio"]["url"], "https://cdn.example/rec/nanjing.wav");
    assert_eq!(records[0]["audio"]["name"], "nanjing");
    assert_eq!(records[1]["province"], "四川省");
    assert_eq!(records[1]["latitude"], 0.0);
    assert_eq!(records[1]["collector"], "未知采集人");
    assert_eq!(records[2]["province"], "广东省");
    assert_eq!(records[2]["content"], "吃饭了吗");
}

#[cfg(feature = "spreadsheet")]
#[test]
fn missing_workbook_is_not_found() {
    let temp = tempfile::tempdir().unwrap();
    let config = PipelineConfig::new(temp.path().join("Data.xlsx"))
        .with_output(temp.path().join("out.json"));
    assert!(matches!(generate(&config), Err(DialectError::NotFound(_))));
}

#[test]
fn unknown_rows_count_as_a_province() {
    let temp = tempfile::tempdir().unwrap();
    let input = write_table(temp.path(), "data.csv", "广州,23.1,113.3,,,\n火星,0,0,,,\n");
    let output = temp.path().join("out.json");

    let summary = generate(&PipelineConfig::new(&input).with_output(&output)).unwrap();
    assert_eq!(summary.provinces, 2);
    assert_eq!(summary.unknown_rows, 1);
}
