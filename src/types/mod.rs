/*!
Types which are not structures.
*/

pub mod err;
