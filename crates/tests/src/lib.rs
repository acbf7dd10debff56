#[cfg(test)]
mod common;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod guard_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod login_flow_tests;

#[cfg(test)]
mod health_tests;
