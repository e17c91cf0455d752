use crate::error::{EngineError, Result};
use crate::model::{Track, TrackId, TrackRegistry};
use std::collections::HashMap;

/// Stable index into the playlist arena
type Slot = usize;

#[derive(Debug)]
struct Node {
    track: Track,
    prev: Option<Slot>,
    next: Option<Slot>,
}

/// Doubly-linked track sequence with title and id lookup indices
///
/// Nodes live in an arena addressed by stable slots; `None` stands in for
/// the missing predecessor of the head and the missing successor of the
/// tail. Freed slots are recycled through a free list, but track ids never
/// are.
///
/// Invariant: after every public mutation, each live track has exactly one
/// node in the chain and exactly one entry in each index, and following any
/// node's `next` to its successor and back along `prev` returns to the same
/// node.
#[derive(Debug, Default)]
pub struct Playlist {
    arena: Vec<Option<Node>>,
    free: Vec<Slot>,
    head: Option<Slot>,
    tail: Option<Slot>,
    by_title: HashMap<String, Slot>,
    by_id: HashMap<TrackId, Slot>,
    registry: TrackRegistry,
}

impl Playlist {
    /// Create an empty playlist with a fresh id sequence
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            by_title: HashMap::new(),
            by_id: HashMap::new(),
            registry: TrackRegistry::new(),
        }
    }

    /// Number of tracks currently in the playlist
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Check if the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Append a new track at the tail
    ///
    /// Titles are unique: appending an existing title is rejected with
    /// [`EngineError::DuplicateTitle`] before any state changes. On success
    /// the track is linked as the new tail and registered in both indices,
    /// and its freshly allocated id is returned.
    pub fn append(
        &mut self,
        title: &str,
        artist: &str,
        genre: &str,
        duration_secs: u32,
    ) -> Result<TrackId> {
        if self.by_title.contains_key(title) {
            return Err(EngineError::DuplicateTitle(title.to_string()));
        }

        let track = self.registry.create(title, artist, genre, duration_secs);
        let id = track.id;

        let slot = self.alloc(Node {
            track,
            prev: None,
            next: None,
        });
        self.link_tail(slot);
        self.by_title.insert(title.to_string(), slot);
        self.by_id.insert(id, slot);

        log::debug!("appended track {} (\"{}\") at position {}", id, title, self.len() - 1);
        Ok(id)
    }

    /// Remove the track at a zero-based position
    ///
    /// Returns the removed track, or `None` if `position` is out of range
    /// (including on an empty playlist), in which case nothing changes.
    pub fn delete_at(&mut self, position: usize) -> Option<Track> {
        let slot = self.slot_at(position)?;

        self.unlink(slot);
        let node = self.arena[slot].take().expect("unlinked slot holds a node");
        self.free.push(slot);
        self.by_id.remove(&node.track.id);
        self.by_title.remove(&node.track.title);

        log::debug!("deleted track {} (\"{}\")", node.track.id, node.track.title);
        Some(node.track)
    }

    /// Relocate the track at `from` to position `to`
    ///
    /// The destination is interpreted against the playlist *after* the
    /// source entry has been detached: on `[A, B, C]`, `move_track(0, 2)`
    /// yields `[B, C, A]` because position 2 of the shortened `[B, C]` is
    /// past the tail. A destination at or beyond the post-removal tail
    /// appends; the track keeps its id in every case.
    ///
    /// `from == to` is a no-op; `from` out of range returns `false` with no
    /// state change.
    pub fn move_track(&mut self, from: usize, to: usize) -> bool {
        if from == to {
            return true;
        }
        let Some(slot) = self.slot_at(from) else {
            return false;
        };

        self.unlink(slot);
        match self.slot_at(to) {
            Some(dest) => self.link_before(slot, dest),
            None => self.link_tail(slot),
        }

        log::debug!(
            "moved track {} from position {} to {}",
            self.node(slot).track.id,
            from,
            to
        );
        true
    }

    /// Reverse the playlist order in place
    ///
    /// Swaps every node's links and the head/tail pointers. The indices are
    /// untouched; they reference slots, not positions.
    pub fn reverse(&mut self) {
        let mut cur = self.head;
        while let Some(slot) = cur {
            let node = self.node_mut(slot);
            std::mem::swap(&mut node.prev, &mut node.next);
            // prev now holds the old forward link
            cur = node.prev;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
    }

    /// Head-to-tail copy of all tracks, for display and reporting
    pub fn snapshot(&self) -> Vec<Track> {
        let mut tracks = Vec::with_capacity(self.len());
        let mut cur = self.head;
        while let Some(slot) = cur {
            let node = self.node(slot);
            tracks.push(node.track.clone());
            cur = node.next;
        }
        tracks
    }

    /// O(1) average lookup by unique title
    pub fn lookup_by_title(&self, title: &str) -> Option<&Track> {
        self.by_title.get(title).map(|&slot| &self.node(slot).track)
    }

    /// O(1) average lookup by id
    pub fn lookup_by_id(&self, id: TrackId) -> Option<&Track> {
        self.by_id.get(&id).map(|&slot| &self.node(slot).track)
    }

    /// Liveness check: whether `id` still names a track in the playlist
    pub fn contains(&self, id: TrackId) -> bool {
        self.by_id.contains_key(&id)
    }

    fn node(&self, slot: Slot) -> &Node {
        self.arena[slot].as_ref().expect("slot referenced by a live link")
    }

    fn node_mut(&mut self, slot: Slot) -> &mut Node {
        self.arena[slot].as_mut().expect("slot referenced by a live link")
    }

    fn alloc(&mut self, node: Node) -> Slot {
        match self.free.pop() {
            Some(slot) => {
                self.arena[slot] = Some(node);
                slot
            }
            None => {
                self.arena.push(Some(node));
                self.arena.len() - 1
            }
        }
    }

    /// Walk from the head to the slot at `position`
    fn slot_at(&self, position: usize) -> Option<Slot> {
        let mut cur = self.head;
        let mut index = 0;
        while let Some(slot) = cur {
            if index == position {
                return Some(slot);
            }
            cur = self.node(slot).next;
            index += 1;
        }
        None
    }

    /// Detach a node from the chain, patching neighbours and head/tail
    fn unlink(&mut self, slot: Slot) {
        let (prev, next) = {
            let node = self.node(slot);
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.node_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.node_mut(n).prev = prev,
            None => self.tail = prev,
        }

        let node = self.node_mut(slot);
        node.prev = None;
        node.next = None;
    }

    /// Link a detached node as the new tail
    fn link_tail(&mut self, slot: Slot) {
        match self.tail {
            Some(t) => {
                self.node_mut(t).next = Some(slot);
                let node = self.node_mut(slot);
                node.prev = Some(t);
                node.next = None;
            }
            None => {
                self.head = Some(slot);
                let node = self.node_mut(slot);
                node.prev = None;
                node.next = None;
            }
        }
        self.tail = Some(slot);
    }

    /// Link a detached node immediately before `dest`
    fn link_before(&mut self, slot: Slot, dest: Slot) {
        let prev = self.node(dest).prev;

        {
            let node = self.node_mut(slot);
            node.prev = prev;
            node.next = Some(dest);
        }
        self.node_mut(dest).prev = Some(slot);
        match prev {
            Some(p) => self.node_mut(p).next = Some(slot),
            None => self.head = Some(slot),
        }
    }
}
