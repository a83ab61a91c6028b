mod utils;

use utils::*;

#[test]
fn list_three_chunks() {
    let mut data = MAGIC_BYTES.to_vec();
    push_chunk_with_crc(&mut data, b"IHDR", &IHDR_DATA, 0x1111_1111);
    push_chunk_with_crc(&mut data, b"tEXt", b"a\0bcd", 0x2222_2222);
    push_chunk_with_crc(&mut data, b"IEND", b"", 0x3333_3333);

    let chunks = list_chunks(&data).unwrap();
    assert_eq!(chunks.len(), 3);

    assert_eq!(chunks[0].chunk_type(), ChunkType::IHDR);
    assert_eq!(chunks[0].length(), 13);
    assert_eq!(chunks[0].chunk_data(), IHDR_DATA);
    assert_eq!(chunks[0].crc(), 0x1111_1111);

    assert_eq!(chunks[1].chunk_type(), ChunkType::tEXt);
    assert_eq!(chunks[1].length(), 5);
    assert_eq!(chunks[1].chunk_data(), b"a\0bcd");
    assert_eq!(chunks[1].crc(), 0x2222_2222);

    assert_eq!(chunks[2].chunk_type(), ChunkType::IEND);
    assert_eq!(chunks[2].length(), 0);
    assert!(chunks[2].chunk_data().is_empty());
    assert_eq!(chunks[2].crc(), 0x3333_3333);
}

#[test]
fn remove_text_chunk() {
    let mut data = MAGIC_BYTES.to_vec();
    push_chunk_with_crc(&mut data, b"IHDR", &IHDR_DATA, 0x1111_1111);
    push_chunk_with_crc(&mut data, b"tEXt", b"a\0bcd", 0x2222_2222);
    push_chunk_with_crc(&mut data, b"IEND", b"", 0x3333_3333);
    let original = data.clone();

    let out = remove_chunks(&data, &ChunkSelection::positions([1])).unwrap();
    assert_eq!(out.len(), 45);
    assert_eq!(data, original);

    let mut expected = MAGIC_BYTES.to_vec();
    push_chunk_with_crc(&mut expected, b"IHDR", &IHDR_DATA, 0x1111_1111);
    push_chunk_with_crc(&mut expected, b"IEND", b"", 0x3333_3333);
    assert_eq!(out, expected);

    let chunks = list_chunks(&out).unwrap();
    assert_eq!(types(&chunks), [ChunkType::IHDR, ChunkType::IEND]);
    assert_eq!(chunks[0].crc(), 0x1111_1111);
    assert_eq!(chunks[1].crc(), 0x3333_3333);

    // Same result when selecting by type
    let by_type = remove_chunks(&data, &ChunkSelection::types([ChunkType::tEXt])).unwrap();
    assert_eq!(by_type, out);
}

#[test]
fn empty_selection_is_identity() {
    for data in [minimal(), with_metadata()] {
        let out = remove_chunks(&data, &ChunkSelection::none()).unwrap();
        assert_eq!(out, data);
        assert_eq!(out.len(), data.len());
        assert_eq!(output_len(&data, &ChunkSelection::none()).unwrap(), data.len());

        let empty_types = remove_chunks(&data, &ChunkSelection::types([])).unwrap();
        assert_eq!(empty_types, data);
    }
}

#[test]
fn signature_only() {
    let data = MAGIC_BYTES.to_vec();

    assert!(list_chunks(&data).unwrap().is_empty());
    assert_eq!(remove_chunks(&data, &ChunkSelection::none()).unwrap(), data);
    assert_eq!(
        remove_chunks(&data, &ChunkSelection::positions([0, 1])).unwrap(),
        data
    );
}

#[test]
fn signature_is_copied_not_checked() {
    let mut data = b"NOTAPNG!".to_vec();
    push_chunk(&mut data, b"IEND", b"");

    let out = remove_chunks(&data, &ChunkSelection::none()).unwrap();
    assert_eq!(&out[..8], b"NOTAPNG!");
    assert!(!Png::is_filetype(&out));

    assert!(matches!(
        list_chunks_with(&data, &Options::strict()),
        Err(Error::InvalidMagicBytes(_))
    ));
}

#[test]
fn removal_composes_as_set_difference() {
    let data = with_metadata();

    let once = remove_chunks(
        &data,
        &ChunkSelection::types([ChunkType::tEXt, ChunkType::tIME]),
    )
    .unwrap();

    let first = remove_chunks(&data, &ChunkSelection::types([ChunkType::tEXt])).unwrap();
    let twice = remove_chunks(
        &first,
        &ChunkSelection::types([ChunkType::tEXt, ChunkType::tIME]),
    )
    .unwrap();
    assert_eq!(twice, once);

    // Positions 2 and 4 in the original are 2 and 3 after removing position 2
    let by_position = remove_chunks(&data, &ChunkSelection::positions([2, 4])).unwrap();
    let step = remove_chunks(&data, &ChunkSelection::positions([2])).unwrap();
    let step = remove_chunks(&step, &ChunkSelection::positions([3])).unwrap();
    assert_eq!(step, by_position);

    assert_eq!(
        types(&list_chunks(&by_position).unwrap()),
        [
            ChunkType::IHDR,
            ChunkType::gAMA,
            ChunkType::IDAT,
            ChunkType::tEXt,
            ChunkType::IEND
        ]
    );
}

#[test]
fn unmatched_positions_are_ignored() {
    let data = minimal();
    let out = remove_chunks(&data, &ChunkSelection::positions([3, 100])).unwrap();
    assert_eq!(out, data);
}

#[test]
fn remover_does_not_enforce_policy() {
    let data = minimal();
    let out = remove_chunks(&data, &ChunkSelection::types([ChunkType::IHDR])).unwrap();

    assert_eq!(
        types(&list_chunks(&out).unwrap()),
        [ChunkType::tEXt, ChunkType::IEND]
    );
}

#[test]
fn order_and_unknown_chunks_preserved() {
    let mut data = MAGIC_BYTES.to_vec();
    push_chunk(&mut data, b"IHDR", &IHDR_DATA);
    push_chunk(&mut data, b"prVt", b"private");
    push_chunk(&mut data, b"tEXt", b"k\0v");
    push_chunk(&mut data, &[0xff, 0xfe, 0x00, 0x01], b"odd");
    push_chunk(&mut data, b"IEND", b"");

    let out = remove_chunks(&data, &ChunkSelection::types([ChunkType::tEXt])).unwrap();
    let chunks = list_chunks(&out).unwrap();

    assert_eq!(chunks.len(), 4);
    assert_eq!(chunks[1].chunk_type().bytes(), *b"prVt");
    assert_eq!(chunks[2].chunk_type().bytes(), [0xff, 0xfe, 0x00, 0x01]);
    assert_eq!(chunks[2].chunk_data(), b"odd");
}

#[test]
fn short_signature() {
    assert!(matches!(
        list_chunks(&[137, 80, 78, 71]),
        Err(Error::MissingSignature(4))
    ));
    assert!(matches!(
        remove_chunks(&[], &ChunkSelection::none()),
        Err(Error::MissingSignature(0))
    ));
}

#[test]
fn truncated_data() {
    let mut data = minimal();
    data.truncate(45);

    // tEXt at offset 33 declares 5 bytes, the CRC would end at 50
    let expected_reason = Malformed::TruncatedChunk {
        chunk_type: ChunkType::tEXt,
        length: 5,
    };
    assert!(matches!(
        list_chunks(&data),
        Err(Error::MalformedChunk { offset: 33, reason }) if reason == expected_reason
    ));
    assert!(matches!(
        remove_chunks(&data, &ChunkSelection::positions([1])),
        Err(Error::MalformedChunk { offset: 33, .. })
    ));
}

#[test]
fn trailing_bytes() {
    let mut data = minimal();
    data.extend_from_slice(&[0, 0, 0, 0, b'I']);

    assert!(matches!(
        list_chunks(&data),
        Err(Error::MalformedChunk {
            offset: 62,
            reason: Malformed::TruncatedHeader
        })
    ));
}

#[test]
fn size_limit() {
    let data = with_metadata();
    let options = Options::default().with_max_data_len(data.len() - 1);

    assert!(matches!(
        remove_chunks_with(&data, &ChunkSelection::none(), &options),
        Err(Error::DataTooLarge { .. })
    ));
    assert!(list_chunks_with(&data, &Options::default().with_max_data_len(data.len())).is_ok());
}
