use super::Section;

/// Project gallery selection: clicking a card selects it, clicking the
/// selected card again clears the selection.
#[derive(Debug, Clone, Default)]
pub struct ProjectsController {
    selected: Option<usize>,
    len: usize,
    mounted: bool,
}

impl ProjectsController {
    pub fn new(len: usize) -> Self {
        Self {
            selected: None,
            len,
            mounted: true,
        }
    }

    /// Toggle `index`. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if !self.mounted || index >= self.len {
            return self.selected;
        }
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
        self.selected
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }
}

impl Section for ProjectsController {
    fn unmount(&mut self) {
        self.mounted = false;
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }
}
