use super::*;
use alloc::vec::Vec;
use proptest::prelude::*;

fn flat(grid: &PixelGrid) -> Vec<u8> {
    grid.rows().iter().flatten().copied().collect()
}

#[test]
fn test_plain_exact() {
    let grid = parse_ascii(b"P1\n3 2\n0 1 0\n1 1 1\n").unwrap();
    assert_eq!((grid.width(), grid.height()), (3, 2));
    assert_eq!(grid.rows(), &[vec![0, 1, 0], vec![1, 1, 1]]);
}

#[test]
fn test_plain_short_data_is_padded() {
    let grid = parse_ascii(b"P1\n4 4\n1111111111\n").unwrap();
    assert_eq!(grid.rows().len(), 4);
    assert!(grid.rows().iter().all(|row| row.len() == 4));
    let pixels = flat(&grid);
    assert_eq!(&pixels[..10], &[1; 10]);
    assert_eq!(&pixels[10..], &[0; 6]);
}

#[test]
fn test_plain_excess_data_is_dropped() {
    let grid = parse_ascii(b"P1\n2 2\n1001\n1111 trailing 11\n").unwrap();
    assert_eq!(grid.rows(), &[vec![1, 0], vec![0, 1]]);
}

#[test]
fn test_plain_comments_and_blank_lines() {
    let data = b"# created by hand\n\nP1\n  # size follows\n2 2\n\n# body\n10\n   \n01\n";
    let grid = parse_ascii(data).unwrap();
    assert_eq!(grid.rows(), &[vec![1, 0], vec![0, 1]]);
}

#[test]
fn test_plain_ignores_other_characters() {
    let grid = parse_ascii(b"P1\r\n3 1\r\n1x\t0,2 1\r\n").unwrap();
    assert_eq!(grid.rows(), &[vec![1, 0, 1]]);
}

#[test]
fn test_plain_magic_prefix() {
    assert!(parse_ascii(b"P1 plain\n1 1\n1\n").is_ok());
    assert_eq!(
        parse_ascii(b"P2\n1 1\n1\n"),
        Err(PbmError::Format(FormatError::BadMagic))
    );
}

#[test]
fn test_plain_needs_three_lines() {
    assert_eq!(
        parse_ascii(b"P1\n# nothing else\n4 4\n"),
        Err(PbmError::Format(FormatError::MissingLines))
    );
}

#[test]
fn test_plain_bad_dimensions() {
    for data in [
        &b"P1\nfour 4\n0\n"[..],
        b"P1\n4\n0\n",
        b"P1\n4 4 4\n0\n",
        b"P1\n-4 4\n0\n",
        b"P1\n0 4\n0\n",
    ] {
        assert_eq!(
            parse_ascii(data),
            Err(PbmError::Format(FormatError::BadDimensions)),
            "{:?}",
            core::str::from_utf8(data)
        );
    }
}

#[test]
fn test_plain_rejects_huge_header() {
    assert_eq!(
        parse_ascii(b"P1\n100000 100000\n0\n"),
        Err(PbmError::Format(FormatError::TooLarge))
    );
}

#[test]
fn test_plain_rejects_binary() {
    assert!(matches!(
        parse_ascii(b"P4\n8 1\n\xff"),
        Err(PbmError::Utf8Error(_))
    ));
}

#[test]
fn test_raw_rows_are_byte_padded() {
    // 10 pixels wide: two bytes per row, the last 6 bits are padding
    let mut data = b"P4\n10 2\n".to_vec();
    data.extend_from_slice(&[0b1010_0000, 0b11_111111, 0b0000_0001, 0b01_000000]);
    let grid = parse_binary(&data).unwrap();
    assert_eq!(
        grid.rows(),
        &[
            vec![1, 0, 1, 0, 0, 0, 0, 0, 1, 1],
            vec![0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
        ]
    );
}

#[test]
fn test_raw_header_comments() {
    let mut data = b"# made with img2pbm\nP4\n\n# width height\n  3 1  \n".to_vec();
    data.push(0b0110_0000);
    let grid = parse_binary(&data).unwrap();
    assert_eq!(grid.rows(), &[vec![0, 1, 1]]);
}

#[test]
fn test_raw_magic_must_match() {
    assert_eq!(
        parse_binary(b"P4x\n1 1\n\x00"),
        Err(PbmError::Format(FormatError::BadMagic))
    );
    assert_eq!(
        parse_binary(b"P5\n1 1\n\x00"),
        Err(PbmError::Format(FormatError::BadMagic))
    );
    assert!(parse_binary(b" P4 \n1 1\n\x80").is_ok());
}

#[test]
fn test_raw_no_newline() {
    assert_eq!(
        parse_binary(b"P4\n8 8"),
        Err(PbmError::Format(FormatError::NoNewline))
    );
    assert_eq!(
        parse_binary(b"# only a comment"),
        Err(PbmError::Format(FormatError::NoNewline))
    );
}

#[test]
fn test_raw_truncated_data() {
    let grid = parse_binary(b"P4\n8 3\n\xff").unwrap();
    assert_eq!(grid.rows().len(), 3);
    assert_eq!(grid.rows()[0], vec![1; 8]);
    assert_eq!(grid.rows()[1], vec![0; 8]);
    assert_eq!(grid.rows()[2], vec![0; 8]);
}

#[test]
fn test_decode_dispatch() {
    let plain = decode(b"P1\n2 1\n10\n").unwrap();
    assert_eq!(plain.rows(), &[vec![1, 0]]);

    // valid UTF-8 raw data still reaches the raw parser
    let raw = decode(b"P4\n2 1\n@").unwrap();
    assert_eq!(raw.rows(), &[vec![0, 1]]);

    let raw = decode(b"P4\n8 1\n\xa5").unwrap();
    assert_eq!(raw.rows(), &[vec![1, 0, 1, 0, 0, 1, 0, 1]]);
}

#[test]
fn test_decode_unknown_magic() {
    assert_eq!(
        decode(b"P3\n1 1\n255\n0 0 0\n"),
        Err(PbmError::Format(FormatError::BadMagic))
    );
    assert!(decode(b"").is_err());
}

#[test]
fn test_read_to_end() {
    let data = [7u8; 1000];
    let mut reader = &data[..];
    assert_eq!(read_to_end(&mut reader, 0).unwrap(), data.to_vec());
}

#[test]
fn test_ragged_rows() {
    let grid = PixelGrid::from_rows(3, 2, vec![vec![1], vec![0, 1, 1]]);
    assert_eq!(grid.get(0, 0), Some(1));
    assert_eq!(grid.get(2, 0), None);
    assert_eq!(grid.get(2, 1), Some(1));
    assert_eq!(grid.get(0, 2), None);
}

#[test]
fn test_p1_writer_wraps_lines() {
    let grid = PixelGrid::from_flat(100, 1, &[1; 100]);
    let mut out = Vec::new();
    write_p1(&mut out, &grid).unwrap();
    let text = core::str::from_utf8(&out).unwrap();
    assert!(text.lines().all(|line| line.len() <= 70));
    assert_eq!(parse_ascii(&out).unwrap(), grid);
}

fn grids() -> impl Strategy<Value = PixelGrid> {
    (1u32..40, 1u32..24).prop_flat_map(|(width, height)| {
        proptest::collection::vec(0u8..=1, (width * height) as usize)
            .prop_map(move |pixels| PixelGrid::from_flat(width, height, &pixels))
    })
}

proptest! {
    #[test]
    fn test_raw_round_trip(grid in grids()) {
        let mut out = Vec::new();
        write_p4(&mut out, &grid).unwrap();
        let row_bytes = (grid.width() as usize).div_ceil(8);
        let header = format!("P4\n{} {}\n", grid.width(), grid.height());
        prop_assert_eq!(out.len(), header.len() + row_bytes * grid.height() as usize);
        prop_assert_eq!(parse_binary(&out).unwrap(), grid.clone());
        prop_assert_eq!(decode(&out).unwrap(), grid);
    }

    #[test]
    fn test_plain_round_trip(grid in grids()) {
        let mut out = Vec::new();
        write_p1(&mut out, &grid).unwrap();
        prop_assert_eq!(decode(&out).unwrap(), grid);
    }
}
