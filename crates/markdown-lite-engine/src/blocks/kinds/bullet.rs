/// Bullet item marker type.
///
/// Each bullet line renders alone; consecutive bullets are never grouped.
pub struct Bullet;

impl Bullet {
    pub const PREFIX: &'static str = "- ";
}
