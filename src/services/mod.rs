pub mod pricing_renderer;

pub use pricing_renderer::PricingRenderer;
