//! Floor collision response.

use crate::body::Body;
use crate::float::Float;
use crate::vec::UpAxis;

/// Fraction of the vertical speed kept after a bounce.
pub const DEFAULT_RESTITUTION: f64 = 0.8;

/// A horizontal plane bodies bounce off from above.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor<F: Float> {
    /// Plane position along the up axis.
    pub height: F,
    /// Multiplier applied to the reversed vertical velocity.
    pub restitution: F,
}

impl<F: Float> Floor<F> {
    pub fn new(height: F, restitution: F) -> Self {
        Floor { height, restitution }
    }

    /// Push a penetrating body back onto the plane and reflect its vertical
    /// velocity, scaled by the restitution.
    ///
    /// Only the up-axis components change. Returns whether the body was in
    /// contact.
    pub fn resolve<V: UpAxis<Scalar = F>>(&self, body: &mut Body<V>) -> bool {
        let radius = body.radius();
        if body.position.height() - radius >= self.height {
            return false;
        }
        let bounced = body.velocity.height() * -self.restitution;
        body.velocity = body.velocity.with_height(bounced);
        body.position = body.position.with_height(self.height + radius);
        true
    }
}

impl<F: Float> Default for Floor<F> {
    fn default() -> Self {
        Floor {
            height: F::zero(),
            restitution: F::from_f64(DEFAULT_RESTITUTION),
        }
    }
}

/// Resolve against the plane at height 0 with restitution 0.8.
///
/// Call after [`Body::update`] in the same tick.
pub fn resolve_floor_collision<V: UpAxis>(body: &mut Body<V>) -> bool {
    Floor::default().resolve(body)
}
