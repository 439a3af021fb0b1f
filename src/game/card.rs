/// A single card on the board.
///
/// The id is an opaque string used only by the board's matching rule; the
/// image is the face-up artwork shared with exactly one partner card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: String,
    image: String,
    face_up: bool,
}

impl Card {
    pub(crate) fn new(id: String, image: String) -> Self {
        Self {
            id,
            image,
            face_up: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Turn the card face-up. Preconditions (fewer than two cards open,
    /// not already the open card) are enforced by the board, not here.
    pub(crate) fn flip(&mut self) {
        self.face_up = true;
    }

    /// Turn the card face-down again. Called only by the board on a
    /// non-matching pair.
    pub(crate) fn reset(&mut self) {
        self.face_up = false;
    }
}
