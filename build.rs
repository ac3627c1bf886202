use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

const SEED_PATH: &str = "data/seed.json";

/// ファイルの更新日時（UNIX秒）
fn modified_secs(path: &Path) -> Option<u64> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(modified.duration_since(UNIX_EPOCH).ok()?.as_secs())
}

fn main() {
    // シードデータの更新日時をフッター表示用に埋め込む
    match modified_secs(Path::new(SEED_PATH)) {
        Some(timestamp) => println!("cargo:rustc-env=SEED_DATA_MODIFIED={}", timestamp),
        None => println!("cargo:warning={} の更新日時を取得できません", SEED_PATH),
    }

    println!("cargo:rerun-if-changed={}", SEED_PATH);
}
