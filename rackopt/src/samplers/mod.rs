pub mod uniform_pos_sampler;
