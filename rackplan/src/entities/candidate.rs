use crate::entities::Rack;

/// One complete proposal: every requested rack, each either placed or unplaced.
///
/// The rack order is the generation order and is preserved by all operators.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    racks: Vec<Rack>,
}

impl Candidate {
    pub fn new(racks: Vec<Rack>) -> Self {
        Self { racks }
    }

    pub fn racks(&self) -> &[Rack] {
        &self.racks
    }

    pub fn into_racks(self) -> Vec<Rack> {
        self.racks
    }

    pub fn len(&self) -> usize {
        self.racks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.racks.is_empty()
    }

    pub fn placed(&self) -> impl Iterator<Item = &Rack> + Clone {
        self.racks.iter().filter(|r| r.is_placed())
    }

    pub fn n_placed(&self) -> usize {
        self.placed().count()
    }

    /// All racks except the one at `idx`.
    pub fn others(&self, idx: usize) -> impl Iterator<Item = &Rack> + Clone {
        self.racks
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != idx)
            .map(|(_, r)| r)
    }

    /// Swaps in a new rack value at `idx`, returning the old one.
    pub fn replace(&mut self, idx: usize, rack: Rack) -> Rack {
        debug_assert_eq!(self.racks[idx].id(), rack.id());
        std::mem::replace(&mut self.racks[idx], rack)
    }
}

impl From<Vec<Rack>> for Candidate {
    fn from(racks: Vec<Rack>) -> Self {
        Candidate::new(racks)
    }
}
