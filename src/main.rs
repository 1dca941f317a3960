fn main() {
    mission_control_api::main();
}
