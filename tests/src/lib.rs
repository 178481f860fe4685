//! End-to-end tests for `kringle`, driving the public API the way the
//! binary does.

#[cfg(test)]
mod assignment;
#[cfg(test)]
mod roster;
#[cfg(test)]
mod util;
