use terse::codec;
use terse::coordinate::{Coordinate, Level};
use terse::model::TerseModel;

const SCROLL: char = '\u{17}';
const SECTION: char = '\u{18}';
const CHAPTER: char = '\u{19}';

fn coord(s: &str) -> Coordinate {
    s.parse().unwrap()
}

#[test]
fn test_full_two_chapters() {
    let text = format!(
        "Chapter 1, Section 1, Scroll 1{SCROLL}\
         Chapter 1, Section 1, Scroll 2{SECTION}\
         Chapter 1, Section 2, Scroll 1{SCROLL}\
         Chapter 1, Section 2, Scroll 2{SCROLL}{SECTION}{CHAPTER}\
         Chapter 2, Section 1, Scroll 1{SCROLL}\
         Chapter 2, Section 1, Scroll 2{SCROLL}{SECTION}\
         Chapter 2, Section 2, Scroll 1{SCROLL}\
         Chapter 2, Section 2, Scroll 2{SCROLL}"
    );
    let mut model = TerseModel::from_text(&text, false);

    for scroll in 1..3 {
        for section in 1..3 {
            for chapter in 1..3 {
                let c = Coordinate::default()
                    .with(Level::Chapter, chapter)
                    .and_then(|c| c.with(Level::Section, section))
                    .and_then(|c| c.with(Level::Scroll, scroll))
                    .unwrap();
                model.set_coords(c);
                assert_eq!(
                    model.scroll(),
                    format!("Chapter {chapter}, Section {section}, Scroll {scroll}")
                );
            }
        }
    }

    assert_eq!(model.leaf_count(), 8);
    assert_eq!(model.word_count(), 48);
}

#[test]
fn test_serialize_two_libraries() {
    let mut model = TerseModel::new();
    model.set_scroll("Test A");
    model.set_coords(coord("10-9-8-7-6-5-4-3-2"));
    model.set_scroll("Test B");

    let mut other = TerseModel::new();
    other.load(&model.serialize(), false);
    assert_eq!(other.leaf_count(), 2);
    assert_eq!(other.word_count(), 4);

    let libraries = other.tree().libraries();
    assert_eq!(libraries.len(), 2);

    let mut node = &libraries[&1];
    for _ in Level::Shelf.depth()..=Level::Scroll.depth() {
        assert_eq!(node.children().len(), 1);
        node = &node.children()[&1];
    }
    assert_eq!(node.text(), "Test A");

    other.set_coords(coord("p10g9s8y7h6e5w4i3m2"));
    assert_eq!(other.scroll(), "Test B");
}

#[test]
fn test_sparse_file() {
    let mut model = TerseModel::new();
    model.set_coords(coord("50-17-13-215-9-44-42-13-6"));
    model.set_scroll("Sparse File Test\n\n\nWith multiple lines.");

    let mut result = TerseModel::new();
    result.load(&model.serialize(), false);
    result.set_coords(model.coords());
    assert_eq!(result.scroll(), model.scroll());
    assert_eq!(result.leaf_count(), 1);
}

#[test]
fn test_sparse_write_costs_only_separators() {
    let mut model = TerseModel::new();
    model.set_scroll("a");
    let before = model.leaf_count();

    model.set_coords(coord("w50"));
    model.set_scroll("b");
    assert_eq!(model.leaf_count(), before + 1);

    let serialized = model.serialize();
    assert_eq!(serialized, format!("a{}b", CHAPTER.to_string().repeat(49)));
}

#[test]
fn test_serialize_known_offsets() {
    let pattern1 = "1-1-1 AAA";
    let pattern2 = "50-33-22 ZZZ";
    let mut model = TerseModel::new();
    model.set_scroll(pattern1);
    model.set_coords(coord("w50i33m22"));
    model.set_scroll(pattern2);

    let serialized = model.serialize();
    let offset = 49 + 32 + 21 + pattern1.len();
    assert_eq!(&serialized[..pattern1.len()], pattern1);
    assert_eq!(&serialized[offset..offset + pattern2.len()], pattern2);
    assert_eq!(model.scroll_offset(), Some(offset));
}

#[test]
fn test_round_trip_preserves_every_scroll() {
    let mut model = TerseModel::new();
    let writes = [
        "p1g1s1y1h1e1w1i1m1",
        "p1g1s1y1h1e1w1i1m9",
        "p1g1s1y1h1e3w2i1m1",
        "p2g5s1y1h1e1w1i1m1",
        "p2g5s1y9h1e1w1i7m3",
        "p7g1s1y1h1e1w1i1m1",
    ];
    for (n, c) in writes.iter().enumerate() {
        model.set_coords(coord(c));
        model.set_scroll(format!("scroll {n}\nwith a second line"));
    }

    let decoded = codec::decode(&model.serialize());
    assert_eq!(&decoded, model.tree());
    let coords: Vec<String> = decoded
        .scrolls()
        .into_iter()
        .map(|(c, _)| c.to_string())
        .collect();
    assert_eq!(coords, writes);
}

#[test]
fn test_coordinate_format_idempotence() {
    for literal in [
        "1-2-3-4-5-6-7-8-9",
        "p9-g8-s7-y6-h5-e4-w3-i2-m1",
        "m4w2",
        "p1g1s1y1h1e1w1i1m1",
    ] {
        let formatted = coord(literal).to_string();
        assert_eq!(coord(&formatted).to_string(), formatted);
    }
}
