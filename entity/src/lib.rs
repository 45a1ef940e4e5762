pub mod book;
pub mod token;
pub mod user;

/*
 Users are created by admin tooling, never over HTTP. Creating a user also
 creates its one token, in the same transaction. A token belongs to exactly
 one user and is dropped with it. Books belong to nobody: any authenticated
 caller may list or create any of them.
 */
