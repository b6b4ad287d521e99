/// Environment variable naming the plugin directory that holds settings.cfg
pub const PLUGIN_DIR_ENV: &str = "DROPNOTES_DIR";
