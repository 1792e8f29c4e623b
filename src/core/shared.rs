pub trait ConfigType {
    fn default()-> Self;
}
