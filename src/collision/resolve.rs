use crate::dynamics::RigidBody;

use super::contact::Contact;

/// Outcome of resolving one contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Scalar impulse applied along the normal (0 when separating)
    pub impulse: f64,
    /// Whether the bodies were approaching along the normal
    pub approaching: bool,
}

/// Separates two overlapping bodies and applies a restitution impulse.
///
/// The contact normal must point from `b` to `a`. Penetration is split in
/// proportion to each body's share of the total inverse mass. The impulse is
/// only applied while the bodies approach each other, using the smaller of
/// the two restitution coefficients.
///
/// When both bodies have infinite mass the total is clamped to 1, so neither
/// moves and no impulse is exchanged.
pub fn resolve_contact(a: &mut RigidBody, b: &mut RigidBody, contact: Contact) -> Resolution {
    let Contact { normal, penetration } = contact;

    let inv_a = a.inv_mass;
    let inv_b = b.inv_mass;
    let mut total_inv_mass = inv_a + inv_b;
    if total_inv_mass == 0.0 {
        total_inv_mass = 1.0;
    }

    // Positional correction
    a.position += normal * (penetration * inv_a / total_inv_mass);
    b.position -= normal * (penetration * inv_b / total_inv_mass);
    a.refresh_vertices();
    b.refresh_vertices();

    // Velocity response
    let relative_velocity = a.velocity - b.velocity;
    let vel_along_normal = relative_velocity.dot(normal);
    if vel_along_normal >= 0.0 {
        return Resolution {
            impulse: 0.0,
            approaching: false,
        };
    }

    let restitution = a.restitution.min(b.restitution);
    let impulse = -(1.0 + restitution) * vel_along_normal / total_inv_mass;

    a.velocity += normal * (impulse * inv_a);
    b.velocity -= normal * (impulse * inv_b);

    Resolution {
        impulse,
        approaching: true,
    }
}

/// Returns mutable references to two distinct elements of a slice, or
/// `None` if the indices are equal or out of bounds.
pub(crate) fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> Option<(&mut T, &mut T)> {
    if i == j || i.max(j) >= items.len() {
        return None;
    }
    if i < j {
        let (head, tail) = items.split_at_mut(j);
        Some((&mut head[i], &mut tail[0]))
    } else {
        let (head, tail) = items.split_at_mut(i);
        Some((&mut tail[0], &mut head[j]))
    }
}
