/// Print a short summary of the host running the benchmark.
pub fn write_cpu_info() {
    println!("logical cpus:  {}", num_cpus::get());
    println!("physical cpus: {}", num_cpus::get_physical());
    println!("arch:          {}", std::env::consts::ARCH);
    println!("os:            {}", std::env::consts::OS);
}
