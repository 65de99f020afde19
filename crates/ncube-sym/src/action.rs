use ncube_core::{EdgeLexicon, SliceableSet};

use crate::group::SymmetryGroup;

/// Action of a [`SymmetryGroup`] on edge-lexicon indices.
#[derive(Debug, Clone)]
pub struct EdgeAction {
    edge_count: usize,
    order: usize,
    // images[sym * edge_count + edge]
    images: Vec<u16>,
}

impl EdgeAction {
    /// Tabulates where each symmetry sends each edge.
    pub fn new(group: &SymmetryGroup, lexicon: &EdgeLexicon) -> Self {
        let edge_count = lexicon.len();
        let mut images = Vec::with_capacity(group.len() * edge_count);
        for index in 0..group.len() {
            let table = group.vertex_images(index);
            for edge in lexicon.edges() {
                let u = table[edge.low() as usize];
                let v = table[edge.high() as usize];
                images.push(lexicon.index_of_pair(u, v) as u16);
            }
        }
        Self {
            edge_count,
            order: group.len(),
            images,
        }
    }

    /// Width of the sets this action applies to.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of symmetries.
    pub fn len(&self) -> usize {
        self.order
    }

    /// Always false for a table built from a group.
    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    /// Image of edge `edge` under symmetry `index`.
    pub fn edge_image(&self, index: usize, edge: usize) -> usize {
        self.images[index * self.edge_count + edge] as usize
    }

    /// Image of `set` under symmetry `index`.
    pub fn transform_set(&self, index: usize, set: &SliceableSet) -> SliceableSet {
        let table = &self.images[index * self.edge_count..(index + 1) * self.edge_count];
        let mut image = SliceableSet::empty(set.len());
        for edge in set.ones() {
            image.insert(table[edge] as usize);
        }
        image
    }

    /// Every image of `set`, one per symmetry (with repetitions).
    pub fn orbit<'a>(&'a self, set: &'a SliceableSet) -> impl Iterator<Item = SliceableSet> + 'a {
        (0..self.order).map(move |index| self.transform_set(index, set))
    }
}
