use soroban_sdk::{Bytes, Env, U256};

/// Host U256 -> math U256, through 32 big-endian bytes
pub fn from_host_u256(value: &U256) -> clmm_types::U256 {
    let mut buf = [0u8; 32];
    value.to_be_bytes().copy_into_slice(&mut buf);
    clmm_types::U256::from_be_bytes::<32>(buf)
}

/// Math U256 -> host U256
pub fn to_host_u256(env: &Env, value: clmm_types::U256) -> U256 {
    let buf = value.to_be_bytes::<32>();
    U256::from_be_bytes(env, &Bytes::from_array(env, &buf))
}
