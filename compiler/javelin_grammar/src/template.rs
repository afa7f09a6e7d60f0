use bitflags::bitflags;

bitflags! {
    /// Which recovery goals a terminal can start.
    ///
    /// Recovery moves its checkpoint forward to the next token that can
    /// begin a recovery header or a recovery statement, so restarts never
    /// begin in the middle of a construct.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct RecoveryTemplate: u16 {
        /// Terminal is in FIRST(RecoveryHeader).
        const HEADER = 1 << 0;
        /// Terminal is in FIRST(RecoveryStatement).
        const STATEMENT = 1 << 1;
    }
}
