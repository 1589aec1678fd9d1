use crate::domain::user::User;

/// Every user registered during this process, in registration order.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}
impl UserDirectory {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.name() == name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.name() == name)
    }

    pub fn is_name_available(&self, name: &str) -> bool {
        self.find_by_name(name).is_none()
    }

    /// Appends without checking the name; callers go through
    /// [`UserDirectory::is_name_available`] first.
    pub fn register(&mut self, user: User) {
        self.users.push(user);
    }
}
