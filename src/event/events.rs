/// Zero-payload notifications; subscribers re-read current state on receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SketchEvent {
    /// The committed drawing was mutated
    ContentsChanged,
    /// The pointer moved while idle, or the tool or sticker library changed
    PointerMoved,
}

impl SketchEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SketchEvent::ContentsChanged => "contents-changed",
            SketchEvent::PointerMoved => "pointer-moved",
        }
    }
}
