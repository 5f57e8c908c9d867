//! Integration test: decode an image, cut it, archive the tiles, and read the archive back.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::cast_possible_truncation)]

use std::io::{Cursor, Read};

use tilecut_tiling::{LoadOutcome, RgbaImage, Session, TileConfig, ViewState, decode_source};

/// A 30x10 image split into three 10x10 tiles: opaque gradient,
/// fully transparent, and semi-transparent blue.
fn striped_png() -> Vec<u8> {
    let img = RgbaImage::from_fn(30, 10, |x, y| match x / 10 {
        0 => image::Rgba([(x * 20) as u8, (y * 20) as u8, 0, 255]),
        1 => image::Rgba([0, 0, 0, 0]),
        _ => image::Rgba([0, 0, 255, 90]),
    });
    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    image::ImageEncoder::write_image(
        encoder,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgba8,
    )
    .unwrap();
    buf
}

fn load(session: &mut Session, bytes: &[u8]) -> LoadOutcome {
    let ticket = session.begin_load();
    session.finish_load(ticket, decode_source(bytes))
}

fn unzip(bytes: Vec<u8>) -> Vec<(String, RgbaImage)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..archive.len())
        .map(|i| {
            let mut entry = archive.by_index(i).unwrap();
            let name = entry.name().to_owned();
            let mut png = Vec::new();
            entry.read_to_end(&mut png).unwrap();
            (name, image::load_from_memory(&png).unwrap().to_rgba8())
        })
        .collect()
}

#[test]
fn three_retained_tiles_make_three_identical_entries() {
    let mut session = Session::new();
    load(&mut session, &striped_png());
    let view = session.cut(&TileConfig::from_form("10", "10", true, false));
    assert!(matches!(view, ViewState::Cut { tile_count: 3, .. }));

    let tiles = session.tiles().expect("cut should produce tiles");
    let archive = tilecut_export::build_archive(tiles.tiles())
        .unwrap()
        .expect("non-empty tile set should produce an archive");

    let entries = unzip(archive);
    assert_eq!(entries.len(), 3);
    for (tile, (name, pixels)) in tiles.iter().zip(&entries) {
        assert_eq!(name, &tilecut_export::tile_filename(tile));
        assert_eq!(pixels, &tile.image, "{name} differs from its tile");
    }
}

#[test]
fn filtered_cut_archives_only_visible_tiles() {
    let mut session = Session::new();
    load(&mut session, &striped_png());
    session.cut(&TileConfig::from_form("10", "10", false, false));

    let tiles = session.tiles().unwrap();
    let entries = unzip(tilecut_export::build_archive(tiles.tiles()).unwrap().unwrap());
    let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["cut_0_0.png", "cut_20_0.png"]);
}

#[test]
fn edge_padding_survives_export() {
    let mut session = Session::new();
    load(&mut session, &striped_png());
    session.cut(&TileConfig::from_form("16", "16", false, false));

    let tiles = session.tiles().unwrap();
    let edge = tiles
        .iter()
        .find(|t| t.origin() == (16, 0))
        .expect("second column tile has visible blue pixels");

    let png = tilecut_export::encode_png(&edge.image).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (16, 16));
    // Source ends at x = 30, i.e. tile column 14.
    assert_eq!(decoded.get_pixel(13, 0).0, [0, 0, 255, 90]);
    assert_eq!(decoded.get_pixel(14, 0).0, [0, 0, 0, 0]);
    assert_eq!(decoded.get_pixel(0, 10).0, [0, 0, 0, 0]);
}

#[test]
fn empty_cut_has_nothing_to_download() {
    let transparent = {
        let img = RgbaImage::new(8, 8);
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            8,
            8,
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    };
    let mut session = Session::new();
    load(&mut session, &transparent);
    session.cut(&TileConfig::default());

    let tiles = session.tiles().unwrap();
    assert!(tiles.is_empty());
    assert!(tilecut_export::build_archive(tiles.tiles()).unwrap().is_none());
}
