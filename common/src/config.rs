pub struct Config {
    /// Quiet level.
    ///
    /// Any value above zero drops section headers and leaves only result lines.
    pub quiet: u8,
    /// Disables ANSI colors in terminal output.
    pub no_color: bool,
}
