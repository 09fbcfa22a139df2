mod crops;
mod diagnosis;
