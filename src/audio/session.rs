/// One process currently producing audio, as reported by the backend.
///
/// `pid` is the unique key within a snapshot; everything else is display
/// state the backend may change between polls.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSession {
    pub pid: u32,
    pub name: String,
    pub icon_path: Option<String>,
    pub volume: f32,
    pub muted: bool,
}
