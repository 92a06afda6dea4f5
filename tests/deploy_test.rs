//! End-to-end deployments through the library API

mod common;

use chrono::{TimeZone, Utc};
use common::{
    LAUNCHER, LAUNCHER_BYTES, decode_brotli, decode_brotli_streams, decode_gzip,
    populate_staging, read_tree, untar,
};
use setup_deployer::deployer::{
    CompressionMode, Deployer, Error, NamingPolicy, Settings, SettingsBuilder,
};
use std::path::Path;

fn settings(root: &Path, mode: CompressionMode, naming: NamingPolicy) -> Settings {
    SettingsBuilder::new()
        .staging_dir(root.join("staging"))
        .output_dir(root.join("setup"))
        .mode(mode)
        .naming(naming)
        .build()
        .unwrap()
}

fn output_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Split `{timestamp}-{hash}{ext}` at the dash
fn split_name(path: &Path) -> (String, String) {
    let name = path.file_name().unwrap().to_string_lossy();
    let (ts, rest) = name.split_once('-').unwrap();
    (ts.to_string(), rest.to_string())
}

#[tokio::test]
async fn gzip_deploy_copies_launcher_and_archives_tree() {
    let tmp = tempfile::tempdir().unwrap();
    populate_staging(&tmp.path().join("staging"));

    let artifact = Deployer::new(settings(tmp.path(), CompressionMode::Gzip, NamingPolicy::Fixed))
        .deploy()
        .await
        .unwrap();

    let setup = tmp.path().join("setup");
    assert_eq!(output_names(&setup), vec![LAUNCHER, "MercurySetup.tar.gz"]);
    assert_eq!(std::fs::read(setup.join(LAUNCHER)).unwrap(), LAUNCHER_BYTES);
    assert_eq!(artifact.path, setup.join("MercurySetup.tar.gz"));
    assert_eq!(artifact.chunk_count, 1);
    assert_eq!(artifact.checksum.len(), 64);

    let data = std::fs::read(&artifact.path).unwrap();
    assert_eq!(artifact.size, data.len() as u64);
    assert_eq!(
        untar(&decode_gzip(&data)),
        read_tree(&tmp.path().join("staging"))
    );
}

#[tokio::test]
async fn chunked_brotli_deploy_round_trips_stream_by_stream() {
    let tmp = tempfile::tempdir().unwrap();
    populate_staging(&tmp.path().join("staging"));

    let artifact = Deployer::new(settings(
        tmp.path(),
        CompressionMode::ChunkedBrotli,
        NamingPolicy::Fixed,
    ))
    .deploy()
    .await
    .unwrap();

    assert_eq!(artifact.chunk_count, 12);
    assert!(artifact.path.ends_with("MercurySetup.shart"));

    let data = std::fs::read(&artifact.path).unwrap();
    let tar = decode_brotli_streams(&data);
    assert_eq!(tar.len(), artifact.serialized_len);
    assert_eq!(untar(&tar), read_tree(&tmp.path().join("staging")));
}

#[tokio::test]
async fn single_stream_brotli_deploy_decodes_with_standard_reader() {
    let tmp = tempfile::tempdir().unwrap();
    populate_staging(&tmp.path().join("staging"));

    let artifact = Deployer::new(settings(tmp.path(), CompressionMode::Brotli, NamingPolicy::Fixed))
        .deploy()
        .await
        .unwrap();

    assert!(artifact.path.ends_with("MercurySetup.tar.br"));
    let data = std::fs::read(&artifact.path).unwrap();
    assert_eq!(
        untar(&decode_brotli(&data)),
        read_tree(&tmp.path().join("staging"))
    );
}

#[tokio::test]
async fn tar_and_zip_modes_write_plain_containers() {
    let tmp = tempfile::tempdir().unwrap();
    populate_staging(&tmp.path().join("staging"));
    let staging_tree = read_tree(&tmp.path().join("staging"));

    let tar = Deployer::new(settings(tmp.path(), CompressionMode::Tar, NamingPolicy::Fixed))
        .deploy()
        .await
        .unwrap();
    assert!(tar.path.ends_with("MercurySetup.tar"));
    assert_eq!(untar(&std::fs::read(&tar.path).unwrap()), staging_tree);

    let zip = Deployer::new(settings(tmp.path(), CompressionMode::Zip, NamingPolicy::Fixed))
        .deploy()
        .await
        .unwrap();
    assert!(zip.path.ends_with("MercurySetup.zip"));
    let archive = zip::ZipArchive::new(std::fs::File::open(&zip.path).unwrap()).unwrap();
    let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert!(names.contains(&"data/file.txt".to_string()));
    assert!(names.contains(&LAUNCHER.to_string()));
}

#[tokio::test]
async fn content_addressed_names_share_hash_across_runs() {
    let tmp = tempfile::tempdir().unwrap();
    populate_staging(&tmp.path().join("staging"));
    let deployer = Deployer::new(settings(
        tmp.path(),
        CompressionMode::ChunkedBrotli,
        NamingPolicy::ContentAddressed,
    ));

    let first = deployer
        .deploy_at(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
        .await
        .unwrap();
    let second = deployer
        .deploy_at(Utc.timestamp_opt(1_700_003_600, 0).unwrap())
        .await
        .unwrap();

    let (first_ts, first_hash) = split_name(&first.path);
    let (second_ts, second_hash) = split_name(&second.path);

    assert_ne!(first_ts, second_ts);
    assert!(first_ts < second_ts);
    assert_eq!(first_hash, second_hash);
    assert!(first_hash.ends_with(".shart"));
    assert_eq!(first.checksum, second.checksum);
}

#[tokio::test]
async fn empty_staging_fails_before_touching_output() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir(tmp.path().join("staging")).unwrap();

    let err = Deployer::new(settings(tmp.path(), CompressionMode::Gzip, NamingPolicy::Fixed))
        .deploy()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::StagingEmpty { .. }));
    assert!(!tmp.path().join("setup").exists());
}

#[tokio::test]
async fn missing_launcher_fails_without_copy_or_archive() {
    let tmp = tempfile::tempdir().unwrap();
    let staging = tmp.path().join("staging");
    std::fs::create_dir_all(&staging).unwrap();
    std::fs::write(staging.join("game.dat"), b"data").unwrap();

    let err = Deployer::new(settings(tmp.path(), CompressionMode::ChunkedBrotli, NamingPolicy::Fixed))
        .deploy()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::LauncherMissing { .. }));
    let setup = tmp.path().join("setup");
    assert!(!setup.exists() || output_names(&setup).is_empty());
}

#[tokio::test]
async fn product_name_drives_launcher_and_artifact_names() {
    let tmp = tempfile::tempdir().unwrap();
    let staging = tmp.path().join("staging");
    std::fs::create_dir_all(&staging).unwrap();
    std::fs::write(staging.join("VenusPlayerLauncher.exe"), b"venus").unwrap();

    let settings = SettingsBuilder::new()
        .product_name("Venus")
        .staging_dir(&staging)
        .output_dir(tmp.path().join("dist"))
        .build()
        .unwrap();
    let artifact = Deployer::new(settings).deploy().await.unwrap();

    assert_eq!(
        output_names(&tmp.path().join("dist")),
        vec!["VenusPlayerLauncher.exe", "VenusSetup.tar.gz"]
    );
    assert!(artifact.launcher.ends_with("VenusPlayerLauncher.exe"));
}

#[cfg(unix)]
#[tokio::test]
async fn symlinked_launcher_is_rejected_before_copy() {
    let tmp = tempfile::tempdir().unwrap();
    let staging = tmp.path().join("staging");
    std::fs::create_dir_all(&staging).unwrap();
    let real = tmp.path().join("launcher-build.exe");
    std::fs::write(&real, LAUNCHER_BYTES).unwrap();
    std::os::unix::fs::symlink(&real, staging.join(LAUNCHER)).unwrap();

    let err = Deployer::new(settings(tmp.path(), CompressionMode::Gzip, NamingPolicy::Fixed))
        .deploy()
        .await
        .unwrap_err();

    assert!(matches!(err, Error::LauncherNotRegular { .. }));
    let setup = tmp.path().join("setup");
    assert!(!setup.join(LAUNCHER).exists());
    assert!(!setup.join("MercurySetup.tar.gz").exists());
}
