use enharmonic::{
    primitives::{parse_scale, Accidental, NATURAL_NOTES, OCTAVE_NOTES},
    EnharmonicError, EnharmonicScaleBuilder, SortOptions,
};

fn computed_builder() -> EnharmonicScaleBuilder {
    let mut builder = EnharmonicScaleBuilder::create();
    builder
        .with_scale(parse_scale(["C", "D", "D#", "F", "G", "A", "A#"]).unwrap())
        .unwrap()
        .with_natural_notes(NATURAL_NOTES.to_vec())
        .unwrap()
        .with_octave_notes(OCTAVE_NOTES.to_vec())
        .unwrap()
        .with_sort_options(SortOptions::default())
        .unwrap();
    assert_eq!(
        builder.compute_best().unwrap(),
        parse_scale(["C", "D", "Eb", "F", "G", "A", "Bb"]).unwrap()
    );
    builder
}

#[test]
fn every_setter_fails_after_compute() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut builder = computed_builder();
    assert!(builder.is_result_computed());
    let pitch = || parse_scale(["C"]).unwrap();
    let results = [
        builder.with_scale(pitch()).err(),
        builder.with_accidental(Accidental::Sharp).err(),
        builder.with_flat_accidental().err(),
        builder.with_sharp_accidental().err(),
        builder.with_natural_notes(pitch()).err(),
        builder.with_octave_notes(pitch()).err(),
        builder.with_accidentals_number(1).err(),
        builder.with_sort_options(SortOptions::default()).err(),
    ];
    for result in results {
        assert_eq!(result, Some(EnharmonicError::AlreadyComputed));
    }
    // Reading again is fine and yields the memoized value.
    assert_eq!(builder.compute_all().unwrap().len(), 1);
    assert_eq!(builder.config().accidental, Accidental::Flat);
}

#[test]
fn best_needs_sort_options() {
    let mut builder = EnharmonicScaleBuilder::create();
    builder
        .with_scale(parse_scale(["C#", "D#", "F#", "G#", "A#"]).unwrap())
        .unwrap();
    let error = builder.compute_best().unwrap_err();
    assert_eq!(error, EnharmonicError::SortOptionsRequired);
    assert_eq!(
        error.to_string(),
        "Sorting options must be provided to get the best enharmonic \
        equivalent scale."
    );
    // The unsorted result is still reachable.
    assert_eq!(
        builder.compute_all().unwrap(),
        &[parse_scale(["Db", "Eb", "Gb", "Ab", "Bb"]).unwrap()]
    );
}

#[test]
fn empty_scale() {
    let mut builder = EnharmonicScaleBuilder::create();
    builder.with_sort_options(SortOptions::default()).unwrap();
    assert!(builder.compute_best().unwrap().is_empty());
    assert_eq!(builder.compute_all().unwrap().len(), 1);
}

#[test]
fn accidentals_limit_checked_on_compute() {
    let mut builder = EnharmonicScaleBuilder::create();
    builder
        .with_scale(parse_scale(["C", "D", "E", "F", "G", "A", "B"]).unwrap())
        .unwrap()
        .with_accidentals_number(20)
        .unwrap();
    assert_eq!(
        builder.compute_all().err(),
        Some(EnharmonicError::AccidentalsOutOfRange {
            requested: 20,
            limit: 12
        })
    );
}
