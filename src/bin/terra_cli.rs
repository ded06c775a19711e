use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::fs;
use std::process;

use terracodec::{compress_land, decode_layer_data, HeightPatch, DEFAULT_PREQUANT, TABLES};

fn main() {
    env_logger::init();

    let matches = Command::new("terra CLI")
        .version("0.1.0")
        .about("지형 LayerData 페이로드 디코딩/인코딩 도구")
        .subcommand(
            Command::new("decode")
                .about("LayerData 바이너리 페이로드를 JSON 패치 목록으로 디코딩")
                .arg(Arg::new("input").required(true).help("페이로드 파일 경로"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("JSON 출력 경로 (생략 시 표준 출력)"),
                ),
        )
        .subcommand(
            Command::new("encode")
                .about("JSON 높이 패치 목록을 LayerData 페이로드로 인코딩")
                .arg(Arg::new("input").required(true).help("패치 JSON 파일 경로"))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("바이너리 출력 경로")
                        .default_value("layerdata.bin"),
                ),
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("decode", sub)) => run_decode(
            sub.get_one::<String>("input").unwrap(),
            sub.get_one::<String>("output").map(String::as_str),
        ),
        Some(("encode", sub)) => run_encode(
            sub.get_one::<String>("input").unwrap(),
            sub.get_one::<String>("output").unwrap(),
        ),
        _ => {
            eprintln!("사용법: terra_cli <decode|encode> --help");
            process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("오류: {:#}", e);
        process::exit(1);
    }
}

fn run_decode(input: &str, output: Option<&str>) -> Result<()> {
    let payload = fs::read(input).with_context(|| format!("페이로드 읽기 실패: {}", input))?;
    let patches = decode_layer_data(&payload);

    println!("디코딩 완료: 패치 {}개", patches.len());
    let json = serde_json::to_string_pretty(&patches)?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("JSON 쓰기 실패: {}", path))?
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn run_encode(input: &str, output: &str) -> Result<()> {
    let json = fs::read_to_string(input).with_context(|| format!("JSON 읽기 실패: {}", input))?;
    let patches: Vec<HeightPatch> = serde_json::from_str(&json).context("패치 JSON 파싱 실패")?;

    let payload = compress_land(&patches, DEFAULT_PREQUANT, &TABLES);
    fs::write(output, &payload).with_context(|| format!("페이로드 쓰기 실패: {}", output))?;

    println!(
        "인코딩 완료: 패치 {}개 → {}바이트 ({})",
        patches.len(),
        payload.len(),
        output
    );
    Ok(())
}
