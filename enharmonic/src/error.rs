use thiserror;

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub enum EnharmonicError {
    #[error("Note \"{0}\" is not valid.")]
    InvalidNote(String),
    #[error(
        "Accidentals limit can not be greater than the octave length. \
        requested: {requested}, limit: {limit}"
    )]
    AccidentalsOutOfRange { requested: usize, limit: usize },
    #[error("Octave notes must include all natural notes. Missing: `{0}`")]
    MissingTableEntry(String),
    #[error("Cannot modify builder after result has been computed.")]
    AlreadyComputed,
    #[error(
        "Sorting options must be provided to get the best \
        enharmonic equivalent scale."
    )]
    SortOptionsRequired,
}
pub type EnharmonicResult<T> = Result<T, EnharmonicError>;
