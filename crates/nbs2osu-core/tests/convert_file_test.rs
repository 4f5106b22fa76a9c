use nbs_model::stream::{write_i16, write_string, write_uint};
use nbs2osu_core::{ConvertError, convert_file};

/// A five-layer song (Timing + Track1..Track4) with one note on Track1 at
/// tick 0, encoded the way the decoder expects it.
fn minimal_song_bytes() -> Vec<u8> {
    let mut data = vec![0, 0];
    write_uint(&mut data, 5, 1); // format version
    write_uint(&mut data, 16, 1); // vanilla instrument count
    write_uint(&mut data, 4, 2); // song length
    write_uint(&mut data, 5, 2); // layer count
    write_string(&mut data, "Test Song");
    write_string(&mut data, "author");
    write_string(&mut data, "original author");
    write_string(&mut data, ""); // description: all defaults
    write_uint(&mut data, 300, 2); // tempo (45 BPM)
    data.extend_from_slice(&[0; 2]); // editor data
    write_uint(&mut data, 4, 1); // time signature
    data.extend_from_slice(&[0; 20]); // statistics
    write_string(&mut data, "");
    data.extend_from_slice(&[0; 4]); // loop data

    // One note at tick 0 on layer 1 (Track1).
    write_i16(&mut data, 1); // tick -1 -> 0
    write_i16(&mut data, 2); // layer -1 -> 1
    data.extend_from_slice(&[0, 40, 100, 100, 0, 0]); // note body
    write_i16(&mut data, 0); // end of tick
    write_i16(&mut data, 0); // end of stream

    for name in ["Timing", "Track1", "Track2", "Track3", "Track4"] {
        write_string(&mut data, name);
        data.extend_from_slice(&[0, 100, 100]); // locked, volume, stereo
    }
    write_uint(&mut data, 0, 1); // no custom instruments
    data
}

#[test]
fn writes_named_beatmap_file() {
    let input_dir = tempfile::tempdir().unwrap();
    let dest_dir = tempfile::tempdir().unwrap();
    let input = input_dir.path().join("song.nbs");
    std::fs::write(&input, minimal_song_bytes()).unwrap();

    let out_path = convert_file(&input, dest_dir.path(), None).unwrap();

    assert_eq!(
        out_path.file_name().unwrap().to_str().unwrap(),
        "original author - Test Song (author) [Notusu].osu"
    );
    let text = std::fs::read_to_string(&out_path).unwrap();
    assert!(text.starts_with("Title=Test Song\n"));
    assert!(text.contains("\nArtist=original author\n"));
    // One timing point at offset 0 (45 BPM), one circle on track 1.
    assert!(text.contains("\n0,1333.3333333333333,4,2,0,0,1,0\n"));
    assert!(text.ends_with("\n64,192,0,1,0,0:0:0:0:\n"));
}

#[test]
fn offset_override_applies() {
    let input_dir = tempfile::tempdir().unwrap();
    let dest_dir = tempfile::tempdir().unwrap();
    let input = input_dir.path().join("song.nbs");
    std::fs::write(&input, minimal_song_bytes()).unwrap();

    let out_path = convert_file(&input, dest_dir.path(), Some(100.0)).unwrap();

    let text = std::fs::read_to_string(&out_path).unwrap();
    assert!(text.contains("\n100,1333.3333333333333,4,2,0,0,1,0\n"));
    assert!(text.contains("\n64,192,100,1,0,0:0:0:0:\n"));
}

#[test]
fn truncated_input_leaves_no_output() {
    let input_dir = tempfile::tempdir().unwrap();
    let dest_dir = tempfile::tempdir().unwrap();
    let input = input_dir.path().join("song.nbs");
    let mut data = minimal_song_bytes();
    data.truncate(30);
    std::fs::write(&input, data).unwrap();

    let result = convert_file(&input, dest_dir.path(), None);

    assert!(matches!(result, Err(ConvertError::Nbs(_))));
    assert_eq!(std::fs::read_dir(dest_dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_input_reports_read_error() {
    let dest_dir = tempfile::tempdir().unwrap();
    let result = convert_file(
        std::path::Path::new("does-not-exist.nbs"),
        dest_dir.path(),
        None,
    );
    assert!(matches!(result, Err(ConvertError::FileRead { .. })));
}
