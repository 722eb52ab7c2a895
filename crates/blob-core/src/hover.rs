/// Which preset a transition heads toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    ToCalm,
    ToChaotic,
}

/// Edge detector over the per-frame hit-test result.
///
/// A transition fires only when the flag flips; feeding the same result
/// again while already in that state never retriggers.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverTracker {
    hovered: bool,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn update(&mut self, hit: bool) -> Option<Transition> {
        match (self.hovered, hit) {
            (false, true) => {
                self.hovered = true;
                Some(Transition::ToCalm)
            }
            (true, false) => {
                self.hovered = false;
                Some(Transition::ToChaotic)
            }
            _ => None,
        }
    }
}
