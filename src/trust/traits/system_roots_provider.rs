use crate::trust::structs::system_roots::SystemRoots;

#[cfg_attr(test, mockall::automock)]
pub trait SystemRootsProvider {
    fn load(&self) -> SystemRoots;
}
