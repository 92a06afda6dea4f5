//! Shared helpers for deployer integration tests

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

pub const LAUNCHER: &str = "MercuryPlayerLauncher.exe";
pub const LAUNCHER_BYTES: &[u8] = b"MZlauncher";

/// Create a staging tree: launcher (10 bytes) plus data/file.txt (5000 bytes)
pub fn populate_staging(staging: &Path) {
    std::fs::create_dir_all(staging.join("data")).unwrap();
    std::fs::write(staging.join(LAUNCHER), LAUNCHER_BYTES).unwrap();
    let text: Vec<u8> = (0..5000u32).map(|i| b"abcdefghij"[(i % 10) as usize]).collect();
    std::fs::write(staging.join("data/file.txt"), text).unwrap();
}

/// Read every regular file below `root`, keyed by `/`-separated relative path
pub fn read_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    walkdir::WalkDir::new(root)
        .into_iter()
        .map(Result::unwrap)
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap();
            let key = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            (key, std::fs::read(e.path()).unwrap())
        })
        .collect()
}

/// Read every regular file entry of a tar archive
pub fn untar(data: &[u8]) -> BTreeMap<String, Vec<u8>> {
    let mut archive = tar::Archive::new(data);
    let mut files = BTreeMap::new();
    for entry in archive.entries().unwrap() {
        let mut entry = entry.unwrap();
        if entry.header().entry_type().is_file() {
            let path = entry.path().unwrap().to_string_lossy().into_owned();
            let mut content = Vec::new();
            entry.read_to_end(&mut content).unwrap();
            files.insert(path, content);
        }
    }
    files
}

/// Decode back-to-back Brotli streams, one stream at a time
pub fn decode_brotli_streams(mut input: &[u8]) -> Vec<u8> {
    use brotli_decompressor::{BrotliDecompressStream, BrotliResult, BrotliState, StandardAlloc};

    let mut output = Vec::new();
    let mut buffer = vec![0u8; 64 * 1024];

    while !input.is_empty() {
        let mut state = BrotliState::new(
            StandardAlloc::default(),
            StandardAlloc::default(),
            StandardAlloc::default(),
        );
        let mut available_in = input.len();
        let mut input_offset = 0;
        let mut total_out = 0;

        loop {
            let mut available_out = buffer.len();
            let mut output_offset = 0;
            let result = BrotliDecompressStream(
                &mut available_in,
                &mut input_offset,
                input,
                &mut available_out,
                &mut output_offset,
                &mut buffer,
                &mut total_out,
                &mut state,
            );
            output.extend_from_slice(&buffer[..output_offset]);
            match result {
                BrotliResult::ResultSuccess => break,
                BrotliResult::NeedsMoreOutput => continue,
                BrotliResult::NeedsMoreInput => panic!("truncated brotli stream"),
                BrotliResult::ResultFailure => panic!("corrupt brotli stream"),
            }
        }

        input = &input[input_offset..];
    }

    output
}

/// Decode a single Brotli stream
pub fn decode_brotli(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    brotli::Decompressor::new(data, 4096)
        .read_to_end(&mut out)
        .unwrap();
    out
}

/// Decode a gzip stream
pub fn decode_gzip(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    flate2::read::MultiGzDecoder::new(data)
        .read_to_end(&mut out)
        .unwrap();
    out
}
