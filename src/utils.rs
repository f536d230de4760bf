use bitflags::bitflags;

bitflags! {
    pub struct BuildFlags: u32 {
        const NO_FLAG = 0;
        const DEBUG = 1 << 1;
    }
}
