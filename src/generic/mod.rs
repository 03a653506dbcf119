/*!
Generic structures, not specific to the library.
*/

pub mod pcg;
