pub mod check_status;
pub mod translate;

use tower::layer::util::Stack;

pub fn layer() -> Stack<check_status::Layer, translate::Layer> {
    Stack::new(check_status::Layer, translate::Layer::new())
}
