#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    yourapp_shell_lib::run();
}
