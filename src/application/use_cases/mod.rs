pub mod scan_modules;

pub use scan_modules::ScanModulesUseCase;
