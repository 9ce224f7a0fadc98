// syntax (like BNF)
//
// root      = ( literal | class ) *
// literal   = char +
// class     = '[' set ']' '{' repeat '}'
// set       = set-item +
// set-item  = set-char ( '-' set-char ) ?
// repeat    = number ( ',' number ) ?
//
// char      = any character except '[' ']' '{' '}'
// set-char  = any character except ']'
//
// `{n,m}` is expanded eagerly: one block of `r` class tokens for every
// `r` in `n..=m`, shortest block first.

mod parser;
pub mod token;

pub use parser::Parser;
pub use token::{Class, Subrange, Token};
