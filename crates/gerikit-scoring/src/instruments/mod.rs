pub mod acb;
pub mod cha2ds2_vasc;
pub mod frail;
pub mod mmse;
pub mod morse;
