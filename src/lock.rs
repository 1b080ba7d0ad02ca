use std::fmt::{Debug, Display};
use std::ops::{BitOr, BitOrAssign};

const X: u8 = 1 << 0;
const Y: u8 = 1 << 1;
const Z: u8 = 1 << 2;

/// Per-axis movement lock.
///
/// A set bit forbids the subdivision averaging rules from perturbing that
/// coordinate, which is how points stay exactly on a symmetry plane. Masks
/// only ever grow: faces union their mask into their edges and corners when
/// created, and nothing ever clears a bit.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisLock {
    flags: u8,
}

impl AxisLock {
    /// No axis locked.
    pub const FREE: AxisLock = AxisLock { flags: 0 };

    pub fn new(x: bool, y: bool, z: bool) -> Self {
        let mut lock = AxisLock::FREE;
        lock.set_x(x);
        lock.set_y(y);
        lock.set_z(z);
        lock
    }

    fn check(&self, i: u8) -> bool {
        self.flags & i > 0
    }

    fn set(&mut self, i: u8, flag: bool) {
        if flag {
            self.flags |= i;
        } else {
            self.flags &= !i;
        }
    }

    pub fn x(&self) -> bool {
        self.check(X)
    }

    pub fn set_x(&mut self, flag: bool) {
        self.set(X, flag);
    }

    pub fn y(&self) -> bool {
        self.check(Y)
    }

    pub fn set_y(&mut self, flag: bool) {
        self.set(Y, flag);
    }

    pub fn z(&self) -> bool {
        self.check(Z)
    }

    pub fn set_z(&mut self, flag: bool) {
        self.set(Z, flag);
    }

    /// Whether coordinate axis `k` (0 = x, 1 = y, 2 = z) is locked.
    ///
    /// This is the accessor the subdivision inner loops use.
    pub fn axis(&self, k: usize) -> bool {
        debug_assert!(k < 3);
        self.check(1 << k)
    }

    pub fn is_free(&self) -> bool {
        self.flags == 0
    }
}

impl BitOr for AxisLock {
    type Output = AxisLock;

    fn bitor(self, rhs: AxisLock) -> AxisLock {
        AxisLock {
            flags: self.flags | rhs.flags,
        }
    }
}

impl BitOrAssign for AxisLock {
    fn bitor_assign(&mut self, rhs: AxisLock) {
        self.flags |= rhs.flags;
    }
}

impl Display for AxisLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            if self.x() { 'x' } else { '-' },
            if self.y() { 'y' } else { '-' },
            if self.z() { 'z' } else { '-' }
        )
    }
}

impl Debug for AxisLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AxisLock({self})")
    }
}

#[cfg(test)]
mod test {
    use super::AxisLock;

    #[test]
    fn t_set_and_check() {
        let mut lock = AxisLock::default();
        assert!(lock.is_free());
        lock.set_z(true);
        assert!(!lock.x() && !lock.y() && lock.z());
        assert!(lock.axis(2));
        assert!(!lock.axis(0));
        lock.set_z(false);
        assert!(lock.is_free());
    }

    #[test]
    fn t_union_grows() {
        let mut lock = AxisLock::new(true, false, false);
        lock |= AxisLock::new(false, false, true);
        assert_eq!(lock, AxisLock::new(true, false, true));
        // Union with an empty mask changes nothing.
        lock |= AxisLock::FREE;
        assert_eq!(lock, AxisLock::new(true, false, true));
    }

    #[test]
    fn t_display() {
        assert_eq!(format!("{}", AxisLock::new(true, false, true)), "x-z");
        assert_eq!(format!("{}", AxisLock::FREE), "---");
    }
}
