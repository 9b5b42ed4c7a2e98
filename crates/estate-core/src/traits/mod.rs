//! Repository traits (ports) for the infrastructure layer

mod repositories;

pub use repositories::{
    AssignmentDetail, NewBooking, NewProperty, NewSession, NewUser, PropertyRepository,
    RepoResult, RoleAssignmentRepository, RoleRepository, SaleRepository, TokenRepository,
    UserRepository,
};
