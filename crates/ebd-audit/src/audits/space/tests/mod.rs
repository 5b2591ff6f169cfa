mod common;
mod requirement;
mod routing;
