pub struct Config {
    /// Output verbosity.
    ///
    /// `0` prints everything, `1` drops headers and the pairing tree,
    /// `2` leaves only warnings and errors.
    pub quiet: u8,
    /// Seeds the candidate shuffle so a run can be reproduced.
    ///
    /// When unset the thread-local random source is used.
    pub seed: Option<u64>,
}
