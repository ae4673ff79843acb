//! Reproducibility of codepoint assignment across runs.

use chai_pua::{run, PuaAllocator, RunOptions};
use chai_repertoire::{Character, Codepoint};

const INPUT: &[&str] = &[
    "U+674E\t李\t⿰木子",
    "U+8B1D\t謝\t⿰言⿰身寸",
    "U+60F3\t想\t⿱相心\t⿱{xiang}心",
    "U+6A39\t樹\t⿰木⿰{shu}寸",
    "U+5C04\t射\t⿰身寸",
];

fn first_run() -> Vec<Character> {
    run(INPUT.iter().copied(), &[], &RunOptions::default())
        .expect("run succeeds")
        .characters
}

#[test]
fn test_identical_input_gives_identical_output() {
    let a = first_run();
    let b = first_run();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_minted_codepoints_are_in_allocation_order() {
    let output = first_run();
    let minted: Vec<Codepoint> = output[INPUT.len()..].iter().map(|c| c.unicode).collect();
    assert_eq!(
        minted,
        vec![
            Codepoint(0xF0000), // ⿰身寸 in 謝
            Codepoint(0xE200),  // xiang
            Codepoint(0xE201),  // shu
            Codepoint(0xF0001), // ⿰{shu}寸 in 樹
        ]
    );
}

#[test]
fn test_rerun_over_own_output_mints_nothing() {
    let repertoire = first_run();
    let output = run(INPUT.iter().copied(), &repertoire, &RunOptions::default()).unwrap();
    assert_eq!(output.report.skipped_existing, INPUT.len());
    assert_eq!(output.report.components_minted, 0);
    assert_eq!(output.report.compounds_minted, 0);
    assert!(output.characters.is_empty());
}

#[test]
fn test_update_over_own_output_reproduces_glyphs() {
    let repertoire = first_run();
    let options = RunOptions {
        update_existing: true,
    };
    let output = run(INPUT.iter().copied(), &repertoire, &options).unwrap();
    assert_eq!(output.report.components_minted, 0);
    assert_eq!(output.report.compounds_minted, 0);
    assert_eq!(output.characters, repertoire[..INPUT.len()].to_vec());
}

#[test]
fn test_seeded_allocator_continues_counters() {
    let repertoire = first_run();
    let allocator = PuaAllocator::new(&repertoire).unwrap();
    assert_eq!(allocator.next_component(), Codepoint(0xE202));
    assert_eq!(allocator.next_compound(), Codepoint(0xF0002));
}

#[test]
fn test_rerun_with_private_use_input_sharing_a_minted_shape() {
    // U+E000 is an input character shaped exactly like the ⿰木子 minted for 李
    let input = ["U+E000\t\u{E000}\t⿰木子", "U+674E\t李\t⿱⿰木子心"];
    let first = run(input, &[], &RunOptions::default()).unwrap().characters;
    let codepoints: Vec<Codepoint> = first.iter().map(|c| c.unicode).collect();
    assert_eq!(
        codepoints,
        vec![Codepoint(0xE000), Codepoint(0x674E), Codepoint(0xF0000)]
    );

    let options = RunOptions {
        update_existing: true,
    };
    let second = run(input, &first, &options).unwrap();
    assert_eq!(second.report.compounds_minted, 0);
    assert_eq!(second.characters, first[..2].to_vec());
}
