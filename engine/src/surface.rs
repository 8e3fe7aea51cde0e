//! Drawing surface the motion tasks write ball positions to.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use bouncer_shared::{BallColor, BallId, Rect, SurfaceSize};

/// A ball primitive as stored on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primitive {
    pub id: BallId,
    pub rect: Rect,
    pub color: Option<BallColor>,
}

/// Primitive store shared between motion tasks and the renderer.
///
/// Implementations must be safe to call from any thread. Operations on an
/// unknown id are no-ops.
pub trait Surface: Send + Sync {
    fn size(&self) -> SurfaceSize;

    /// Create an oval inscribed in `rect`. `None` color means no fill.
    fn create_oval(&self, rect: Rect, color: Option<BallColor>) -> BallId;

    fn coords(&self, id: BallId) -> Option<Rect>;

    /// Returns false if `id` is not on the surface.
    fn move_to(&self, id: BallId, rect: Rect) -> bool;

    /// Remove every primitive. Ids are not reused afterwards.
    fn clear(&self);

    /// All primitives ordered by id.
    fn primitives(&self) -> Vec<Primitive>;
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct CanvasInner {
    next_id: BallId,
    items: BTreeMap<BallId, Primitive>,
}

/// In-memory surface. The bevy client renders from [`Surface::primitives`].
pub struct Canvas {
    size: SurfaceSize,
    inner: Mutex<CanvasInner>,
}

impl Canvas {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            inner: Mutex::new(CanvasInner {
                next_id: 1,
                items: BTreeMap::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Surface for Canvas {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn create_oval(&self, rect: Rect, color: Option<BallColor>) -> BallId {
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.items.insert(id, Primitive { id, rect, color });
        id
    }

    fn coords(&self, id: BallId) -> Option<Rect> {
        lock(&self.inner).items.get(&id).map(|p| p.rect)
    }

    fn move_to(&self, id: BallId, rect: Rect) -> bool {
        match lock(&self.inner).items.get_mut(&id) {
            Some(p) => {
                p.rect = rect;
                true
            }
            None => false,
        }
    }

    fn clear(&self) {
        lock(&self.inner).items.clear();
    }

    fn primitives(&self) -> Vec<Primitive> {
        lock(&self.inner).items.values().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(SurfaceSize::new(720, 720))
    }

    #[test]
    fn ids_are_distinct_and_increasing() {
        let c = canvas();
        let a = c.create_oval(Rect::new(0, 0, 25, 25), None);
        let b = c.create_oval(Rect::new(0, 0, 25, 25), Some(BallColor::Red));
        assert!(b > a);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn ids_not_reused_after_clear() {
        let c = canvas();
        let a = c.create_oval(Rect::new(0, 0, 25, 25), None);
        c.clear();
        assert!(c.is_empty());
        let b = c.create_oval(Rect::new(0, 0, 25, 25), None);
        assert!(b > a);
    }

    #[test]
    fn move_unknown_id_is_noop() {
        let c = canvas();
        assert!(!c.move_to(42, Rect::new(1, 1, 2, 2)));
        assert!(c.coords(42).is_none());
        assert!(c.is_empty());
    }

    #[test]
    fn move_updates_coords() {
        let c = canvas();
        let id = c.create_oval(Rect::new(0, 0, 50, 50), Some(BallColor::Blue));
        assert!(c.move_to(id, Rect::new(3, 4, 53, 54)));
        assert_eq!(c.coords(id), Some(Rect::new(3, 4, 53, 54)));
        assert_eq!(c.primitives()[0].color, Some(BallColor::Blue));
    }
}
