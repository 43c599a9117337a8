pub mod compare;
pub mod dispatch;
pub mod evidence;
pub mod session;
