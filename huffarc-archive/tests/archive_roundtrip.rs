use huffarc_archive::{ArchiveFile, MAGIC, VERSION, decode_archive, encode_archive, scan_entries};
use huffarc_core::error::HuffArcError;

fn varied_files() -> Vec<ArchiveFile> {
    // Mix of text, repeated bytes, binary, and an empty file.
    let text = "The quick brown fox jumps over the lazy dog. ".repeat(50);
    let single: Vec<u8> = vec![b'z'; 1000];
    let binary: Vec<u8> = (0..4096u32).map(|i| (i * 31 % 251) as u8).collect();

    vec![
        ArchiveFile::new("docs/readme.txt", text.into_bytes()),
        ArchiveFile::new("zeros.bin", single),
        ArchiveFile::new("data.bin", binary),
        ArchiveFile::new("empty.log", Vec::new()),
    ]
}

#[test]
fn roundtrip_preserves_names_contents_and_order() {
    let files = varied_files();
    let archive = encode_archive(&files).unwrap();
    let decoded = decode_archive(&archive).unwrap();
    assert_eq!(decoded, files);
}

#[test]
fn archive_starts_with_magic_and_version() {
    let archive = encode_archive(&varied_files()).unwrap();
    assert_eq!(&archive[..4], &MAGIC);
    assert_eq!(archive[4], VERSION);
}

#[test]
fn compresses_skewed_text() {
    let text = "aaaaaaaaaaaaaaaaaaaabbbbbccc".repeat(200);
    let files = vec![ArchiveFile::new("skewed.txt", text.clone().into_bytes())];
    let archive = encode_archive(&files).unwrap();
    assert!(archive.len() < text.len());
}

#[test]
fn scan_reports_sizes_without_decoding() {
    let files = varied_files();
    let archive = encode_archive(&files).unwrap();
    let infos = scan_entries(&archive).unwrap();

    assert_eq!(infos.len(), files.len());
    for (info, file) in infos.iter().zip(&files) {
        assert_eq!(info.name, file.name);
        assert_eq!(info.original_size, file.data.len() as u64);
    }
    // Header plus the entries accounts for every byte.
    let total: u64 = 5 + infos.iter().map(|i| i.stored_size).sum::<u64>();
    assert_eq!(total, archive.len() as u64);
}

#[test]
fn rejects_foreign_container() {
    let err = decode_archive(b"PK\x03\x04rest-of-a-zip").unwrap_err();
    assert!(matches!(err, HuffArcError::InvalidMagic { .. }));
}

#[test]
fn rejects_future_version() {
    let mut archive = encode_archive(&varied_files()).unwrap();
    archive[4] = 0x02;
    let err = decode_archive(&archive).unwrap_err();
    assert!(matches!(
        err,
        HuffArcError::UnsupportedVersion { version: 0x02 }
    ));
}

#[test]
fn rejects_truncation_after_header() {
    let archive = encode_archive(&varied_files()).unwrap();
    // Cut inside the first entry's name field.
    let err = decode_archive(&archive[..8]).unwrap_err();
    assert!(matches!(err, HuffArcError::Entry { index: 0, .. }));
}

#[test]
fn rejects_truncated_final_payload() {
    let archive = encode_archive(&varied_files()).unwrap();
    let err = decode_archive(&archive[..archive.len() - 10]).unwrap_err();
    assert!(matches!(err, HuffArcError::Entry { .. }));
}

#[test]
fn single_byte_file_roundtrips() {
    let files = vec![ArchiveFile::new("one", vec![0xFF])];
    let decoded = decode_archive(&encode_archive(&files).unwrap()).unwrap();
    assert_eq!(decoded[0].data, vec![0xFF]);
}

#[test]
fn many_small_entries() {
    let files: Vec<ArchiveFile> = (0..100)
        .map(|i| ArchiveFile::new(format!("f{i:03}"), format!("contents {i}").into_bytes()))
        .collect();
    let decoded = decode_archive(&encode_archive(&files).unwrap()).unwrap();
    assert_eq!(decoded, files);
}
