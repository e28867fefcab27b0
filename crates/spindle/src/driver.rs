pub use spindle_core::driver::{
    operation::{self, Operation},
    ClientOption, Config, Connection, Driver, Response, Rows,
};
