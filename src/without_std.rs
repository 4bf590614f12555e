
#[macro_use]
extern crate alloc;

// Wrap core:: and alloc:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use core::{
        char,
        cmp,
        convert,
        default,
        fmt,
        hash,
        iter,
        mem,
        num,
        ops,
        str,
    };

    pub use alloc::rc::Rc;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec::Vec;
}
